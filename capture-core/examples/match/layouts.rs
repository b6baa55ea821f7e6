/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use capture_utils::Layout;

const DEFAULT_CAPTURE: &str = "\
%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%
%1 .  %   .      .     %  .  2%
%3 %% % %%%%% %%%%%% %%% %%% 4%
%  .    %  .   %  .    %    . %
%%%% %%%% %%%% %% %%%% %%%% %%%
%. .     .    %  %    .     . %
% %%%%% %%%%% %  % %%%%% %%%% %
%   .     .        .     .    %
%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%";

lazy_static! {
    pub static ref DEFAULT_LAYOUT: Layout = DEFAULT_CAPTURE
        .parse()
        .unwrap_or_else(|error| panic!("invalid built-in layout: {error}"));
}
